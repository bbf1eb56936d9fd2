use std::fmt;
use std::io;

/// sysexits.h `EX_IOERR`: an error occurred while doing I/O on a file.
const EX_IOERR: i32 = 74;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    InvalidLength(String),
    InvalidArgs(String),
    Entropy(String),
}

impl Error {
    /// Process exit status for a run that failed with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io(_) => EX_IOERR,
            Error::InvalidLength(_) | Error::InvalidArgs(_) | Error::Entropy(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::InvalidLength(msg) => write!(f, "Invalid length: {}", msg),
            Error::InvalidArgs(msg) => write!(f, "invalid arguments: {}", msg),
            Error::Entropy(msg) => write!(f, "entropy error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_io() {
        let err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let msg = format!("{}", err);
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_display_invalid_length() {
        let err = Error::InvalidLength("must be a positive integer".into());
        assert_eq!(
            format!("{}", err),
            "Invalid length: must be a positive integer"
        );
    }

    #[test]
    fn test_display_invalid_args() {
        let err = Error::InvalidArgs("bad value".into());
        let msg = format!("{}", err);
        assert!(msg.contains("invalid arguments"));
        assert!(msg.contains("bad value"));
    }

    #[test]
    fn test_display_entropy() {
        let err = Error::Entropy("getrandom failed".into());
        let msg = format!("{}", err);
        assert!(msg.contains("entropy error"));
        assert!(msg.contains("getrandom failed"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("expected Error::Io"),
        }
    }

    #[test]
    fn test_exit_codes() {
        let io = Error::Io(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(io.exit_code(), 74);
        assert_eq!(Error::InvalidLength("x".into()).exit_code(), 1);
        assert_eq!(Error::InvalidArgs("x".into()).exit_code(), 1);
        assert_eq!(Error::Entropy("x".into()).exit_code(), 1);
    }
}
