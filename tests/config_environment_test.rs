// ABOUTME: Integration tests for environment-driven server and logging configuration
// ABOUTME: Runs serially because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use foodbridge_server::config::{Environment, ServerConfig};
use foodbridge_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const SERVER_VARS: [&str; 5] = [
    "HTTP_PORT",
    "HOST",
    "FOODBRIDGE_CATALOG_PATH",
    "FOODBRIDGE_REFERENCE_DATE",
    "ENVIRONMENT",
];

const LOGGING_VARS: [&str; 7] = [
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "LOG_INCLUDE_SPANS",
    "SERVICE_NAME",
    "SERVICE_VERSION",
];

fn clear(vars: &[&str]) {
    for var in vars {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear(&SERVER_VARS);

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind_address(), "127.0.0.1:8081");
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear(&SERVER_VARS);
    env::set_var("HTTP_PORT", "9090");
    env::set_var("HOST", "0.0.0.0");
    env::set_var("FOODBRIDGE_CATALOG_PATH", "/var/lib/foodbridge/catalog.json");
    env::set_var("FOODBRIDGE_REFERENCE_DATE", "2025-06-01");
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    clear(&SERVER_VARS);

    assert_eq!(config.bind_address(), "0.0.0.0:9090");
    assert_eq!(
        config.catalog_path,
        Some(PathBuf::from("/var/lib/foodbridge/catalog.json"))
    );
    assert_eq!(config.today(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    assert_eq!(config.environment, Environment::Production);
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear(&SERVER_VARS);
    env::set_var("HOST", "   ");
    env::set_var("FOODBRIDGE_CATALOG_PATH", "");
    env::set_var("FOODBRIDGE_REFERENCE_DATE", " ");

    let config = ServerConfig::from_env().unwrap();
    clear(&SERVER_VARS);

    assert_eq!(config.host, "127.0.0.1");
    assert!(config.catalog_path.is_none());
    assert!(config.reference_date.is_none());
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear(&SERVER_VARS);
    env::set_var("HTTP_PORT", "eighty");

    let error = ServerConfig::from_env().unwrap_err();
    clear(&SERVER_VARS);

    assert!(error.to_string().contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_invalid_reference_date_is_rejected() {
    clear(&SERVER_VARS);
    env::set_var("FOODBRIDGE_REFERENCE_DATE", "01/06/2025");

    let error = ServerConfig::from_env().unwrap_err();
    clear(&SERVER_VARS);

    assert!(error.to_string().contains("FOODBRIDGE_REFERENCE_DATE"));
}

#[test]
#[serial]
fn test_logging_defaults() {
    clear(&LOGGING_VARS);

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "foodbridge-server");
    assert!(!config.include_location);
    assert!(!config.include_thread);
    assert!(!config.include_spans);
}

#[test]
#[serial]
fn test_production_logging_enables_detail() {
    clear(&LOGGING_VARS);
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "JSON");

    let config = LoggingConfig::from_env();
    clear(&LOGGING_VARS);

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    assert!(config.include_spans);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default(" json "), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}
