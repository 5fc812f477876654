use google_cloud_gax::grpc::Status;

/// Failures surfaced by the Pub/Sub service or while connecting to it.
///
/// Service errors are carried as-is; nothing here retries or reclassifies them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load credentials: {0}")]
    Auth(String),

    #[error("failed to connect to Pub/Sub: {0}")]
    Connect(#[from] google_cloud_pubsub::client::Error),

    #[error("rpc error: code = {:?} desc = {}", .0.code(), .0.message())]
    Status(#[from] Status),
}

impl Error {
    /// The gRPC status code, when the error came back from an RPC.
    pub fn code(&self) -> Option<google_cloud_gax::grpc::Code> {
        match self {
            Error::Status(status) => Some(status.code()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_gax::grpc::Code;

    #[test]
    fn renders_status_verbatim() {
        let err = Error::from(Status::new(Code::AlreadyExists, "Topic already exists"));

        assert_eq!(
            err.to_string(),
            "rpc error: code = AlreadyExists desc = Topic already exists"
        );
        assert_eq!(err.code(), Some(Code::AlreadyExists));
    }

    #[test]
    fn client_setup_errors_convert() {
        fn converts<E: From<google_cloud_pubsub::client::Error>>() {}
        converts::<Error>();
    }

    #[test]
    fn auth_errors_have_no_code() {
        let err = Error::Auth("no credentials found".to_string());

        assert_eq!(err.code(), None);
        assert_eq!(err.to_string(), "failed to load credentials: no credentials found");
    }
}
