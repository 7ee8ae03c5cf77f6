pub mod alert_service;
pub mod health_service;
pub mod stock_service;
