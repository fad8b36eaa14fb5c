//! Health Check
//!
//! Service status for load balancers and orchestrators.
//!
//! ## Endpoints
//! - `/health` - status, uptime and storage reachability
//! - `/health/ready` - ready to take traffic (storage answers a ping)
//! - `/health/live` - process is running
//!
//! ## Response
//! ```json
//! {
//!   "status": "healthy",
//!   "uptime_seconds": 3600,
//!   "version": "0.1.0",
//!   "timestamp": 1234567890,
//!   "details": { "storage": "postgres", "storage_reachable": true }
//! }
//! ```

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// 健康状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// 健康
    Healthy,
    /// 降级（存储不可达）
    Degraded,
    /// 不健康（正在关闭）
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// 运行时间（秒）
    pub uptime_seconds: u64,
    pub version: String,
    /// Unix 时间戳（秒）
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDetails {
    /// 存储后端名称（`postgres` 或 `memory`）
    pub storage: String,
    /// 最近一次 ping 是否成功
    pub storage_reachable: bool,
}

/// 健康检查器
pub struct HealthChecker {
    /// 启动时间
    start_time: SystemTime,
    /// 当前状态
    status: RwLock<HealthStatus>,
    version: String,
    storage: String,
}

impl HealthChecker {
    pub fn new(version: impl Into<String>, storage: impl Into<String>) -> Self {
        Self {
            start_time: SystemTime::now(),
            status: RwLock::new(HealthStatus::Healthy),
            version: version.into(),
            storage: storage.into(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time
            .elapsed()
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    fn current_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    pub fn set_status(&self, status: HealthStatus) {
        *self.status.write() = status;
    }

    pub fn get_status(&self) -> HealthStatus {
        *self.status.read()
    }

    /// Builds a response from the result of the latest storage ping
    ///
    /// An unreachable store degrades a healthy service; an explicitly
    /// unhealthy service stays unhealthy.
    pub fn check_health(&self, storage_reachable: bool) -> HealthResponse {
        let status = match (self.get_status(), storage_reachable) {
            (HealthStatus::Healthy, false) => HealthStatus::Degraded,
            (status, _) => status,
        };

        HealthResponse {
            status,
            uptime_seconds: self.uptime_seconds(),
            version: self.version.clone(),
            timestamp: Self::current_timestamp(),
            details: Some(HealthDetails {
                storage: self.storage.clone(),
                storage_reachable,
            }),
        }
    }

    /// Liveness holds for as long as the process can answer
    pub fn check_liveness(&self) -> bool {
        true
    }

    pub fn check_readiness(&self, storage_reachable: bool) -> bool {
        storage_reachable && matches!(self.get_status(), HealthStatus::Healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_checker_creation() {
        let checker = HealthChecker::new("1.0.0", "memory");
        assert_eq!(checker.version, "1.0.0");
        assert_eq!(checker.get_status(), HealthStatus::Healthy);
    }

    #[test]
    fn test_status_change() {
        let checker = HealthChecker::new("1.0.0", "memory");

        checker.set_status(HealthStatus::Degraded);
        assert_eq!(checker.get_status(), HealthStatus::Degraded);

        checker.set_status(HealthStatus::Unhealthy);
        assert_eq!(checker.get_status(), HealthStatus::Unhealthy);
    }

    #[test]
    fn test_health_response() {
        let checker = HealthChecker::new("1.0.0", "postgres");
        let response = checker.check_health(true);

        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.version, "1.0.0");
        assert!(response.timestamp > 0);
        assert_eq!(
            response.details,
            Some(HealthDetails {
                storage: "postgres".to_string(),
                storage_reachable: true,
            })
        );
    }

    #[test]
    fn test_unreachable_storage_degrades() {
        let checker = HealthChecker::new("1.0.0", "postgres");
        assert_eq!(checker.check_health(false).status, HealthStatus::Degraded);

        checker.set_status(HealthStatus::Unhealthy);
        assert_eq!(checker.check_health(false).status, HealthStatus::Unhealthy);
    }

    #[test]
    fn test_liveness_probe() {
        let checker = HealthChecker::new("1.0.0", "memory");
        assert!(checker.check_liveness());

        // 即使状态不健康，存活检查也应该通过
        checker.set_status(HealthStatus::Unhealthy);
        assert!(checker.check_liveness());
    }

    #[test]
    fn test_readiness_probe() {
        let checker = HealthChecker::new("1.0.0", "memory");
        assert!(checker.check_readiness(true));
        assert!(!checker.check_readiness(false));

        checker.set_status(HealthStatus::Degraded);
        assert!(!checker.check_readiness(true));

        checker.set_status(HealthStatus::Healthy);
        assert!(checker.check_readiness(true));
    }

    #[test]
    fn test_serialization() {
        let checker = HealthChecker::new("1.0.0", "memory");
        let json = serde_json::to_string(&checker.check_health(true)).unwrap();

        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"storage\":\"memory\""));
        assert!(json.contains("1.0.0"));
    }
}
