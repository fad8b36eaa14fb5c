// 按 DDD 分层组织：二进制文件和集成测试都通过这些公共模块访问服务
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;
