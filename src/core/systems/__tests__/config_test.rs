//! # 설정 단위테스트

use crate::core::error::CordicError;
use crate::core::systems::config::CordicConfig;

#[test]
fn 기본_설정_테스트() {
    let config = CordicConfig::default();
    assert_eq!(config.iterations, 300);
    assert_eq!(config.exponent_bias, 127);
    assert!(config.validate().is_ok());
}

#[test]
fn 설정_검증_테스트() {
    assert_eq!(
        CordicConfig::with_iterations(0).validate(),
        Err(CordicError::InvalidIterations(0))
    );
    assert!(CordicConfig::with_iterations(1).validate().is_ok());
    assert!(CordicConfig::with_iterations(2000).validate().is_err());
}

#[test]
fn 부분_json_기본값_채움_테스트() {
    let config: CordicConfig = serde_json::from_str(r#"{ "iterations": 64 }"#).unwrap();
    assert_eq!(config.iterations, 64);
    assert_eq!(config.exponent_bias, 127);

    let empty: CordicConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, CordicConfig::default());

    let json = serde_json::to_string(&config).unwrap();
    let back: CordicConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
