//! 页面视图：与站点的四个区块一一对应

pub mod about;
pub mod home;
pub mod pricing;
pub mod solution;
