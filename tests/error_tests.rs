// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use systran8_provider::error::ProviderError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        ProviderError::Config("No key".to_string()),
        ProviderError::InvalidArgument("source locale is required".to_string()),
        ProviderError::NotInitialized,
        ProviderError::Cancelled,
        ProviderError::Api {
            status: Some(500),
            message: "bad key - StatusCode 500 [Internal Server Error]".to_string(),
        },
        ProviderError::BadResponse {
            status: Some(502),
            message: "StatusCode 502 [Bad Gateway]".to_string(),
            body: "oops".to_string(),
        },
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_api_error_carries_status_and_message() {
    let error = ProviderError::Api {
        status: Some(500),
        message: "bad key - StatusCode 500 [Internal Server Error]".to_string(),
    };
    assert!(format!("{}", error).contains("bad key"));
    assert_eq!(error.status_code(), Some(500));
    assert_eq!(error.raw_body(), None);
}

#[test]
fn test_bad_response_keeps_raw_body() {
    let error = ProviderError::BadResponse {
        status: Some(500),
        message: "StatusCode 500 [Internal Server Error]".to_string(),
        body: "oops".to_string(),
    };
    assert_eq!(error.raw_body(), Some("oops"));
    assert_eq!(error.status_code(), Some(500));
}

#[test]
fn test_catalog_load_wraps_cause() {
    let error = ProviderError::CatalogLoad(Box::new(ProviderError::BadResponse {
        status: Some(503),
        message: "StatusCode 503 [Service Unavailable]".to_string(),
        body: "down for maintenance".to_string(),
    }));
    assert!(format!("{}", error).contains("supported language pairs"));
    assert_eq!(error.status_code(), Some(503));
    assert_eq!(error.raw_body(), Some("down for maintenance"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_caller_errors() {
    assert!(ProviderError::NotInitialized.is_caller_error());
    assert!(ProviderError::InvalidArgument("x".to_string()).is_caller_error());
    assert!(!ProviderError::Cancelled.is_caller_error());
}
