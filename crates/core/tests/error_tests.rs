// ═══════════════════════════════════════════════════════════════════
// Error Tests: Display, From conversions, std::error::Error
// ═══════════════════════════════════════════════════════════════════

use trading_assistant_core::errors::CoreError;

mod display {
    use super::*;

    #[test]
    fn storage() {
        let e = CoreError::Storage("quota exceeded".into());
        assert_eq!(e.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn serialization() {
        let e = CoreError::Serialization("bad state".into());
        assert_eq!(e.to_string(), "Serialization error: bad state");
    }

    #[test]
    fn deserialization() {
        let e = CoreError::Deserialization("expected array".into());
        assert_eq!(e.to_string(), "Deserialization error: expected array");
    }

    #[test]
    fn file_io() {
        let e = CoreError::FileIO("permission denied".into());
        assert_eq!(e.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn config() {
        let e = CoreError::Config("chart_points must be at least 1".into());
        assert_eq!(
            e.to_string(),
            "Invalid configuration: chart_points must be at least 1"
        );
    }

    #[test]
    fn random() {
        let e = CoreError::Random("no entropy".into());
        assert_eq!(e.to_string(), "Random source unavailable: no entropy");
    }

    #[test]
    fn empty_message() {
        let e = CoreError::Storage(String::new());
        assert_eq!(e.to_string(), "Storage error: ");
    }
}

mod from_impls {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "store.json missing");
        let e: CoreError = io.into();
        match e {
            CoreError::FileIO(msg) => assert!(msg.contains("store.json missing")),
            other => panic!("expected FileIO, got {other:?}"),
        }
    }

    #[test]
    fn from_serde_json_error() {
        let err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let e: CoreError = err.into();
        assert!(matches!(e, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagates_io() {
        fn read_missing() -> Result<String, CoreError> {
            Ok(std::fs::read_to_string(
                "/definitely/not/a/real/path/trading-store.json",
            )?)
        }
        assert!(matches!(read_missing(), Err(CoreError::FileIO(_))));
    }
}

mod std_error {
    use super::*;

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::Config("x".into()));
    }

    #[test]
    fn boxes_as_dyn_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(CoreError::Storage("full".into()));
        assert_eq!(boxed.to_string(), "Storage error: full");
    }

    #[test]
    fn debug_names_variant() {
        let e = CoreError::Random("x".into());
        assert!(format!("{e:?}").starts_with("Random("));
    }
}
