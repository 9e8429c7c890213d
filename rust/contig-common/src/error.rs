use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index, len }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = Error::index_out_of_range(5, 3);
        assert_eq!(err.to_string(), "index 5 out of range for length 3");
        assert!(matches!(
            err.kind(),
            ErrorKind::IndexOutOfRange { index: 5, len: 3 }
        ));
    }

    #[test]
    fn test_invalid_arg_message() {
        let err = Error::invalid_arg("len", "len <= capacity");
        assert_eq!(err.to_string(), "invalid argument len: len <= capacity");
        match err.into_kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "len");
                assert_eq!(message, "len <= capacity");
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
