#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Error {
    IncorrectData {
        with: &'static str,
    },
    DatabaseError {
        operation: &'static str,
        with: &'static str,
    },
    InternalError,
    OperationFailed,

    RenderFail,
    EmailFailed,
    MissingRole {
        role: &'static str,
    },

    MissingHeaders,
    InvalidSession,
    InvalidCredentials,
    UnverifiedAccount,
    BlockedAccount,

    EmailInUse,
    UsernameTaken,
    InvalidCode,
    ExpiredCode,
    UnknownOrAlreadyVerified,
    SamePassword,
    ShortPassword {
        minimum: usize,
    },

    UnknownUser,
    UnknownStore,
    UnknownProduct,
    UnknownComment,
    StoreRequired,
    StoreExists,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type Success = Result<()>;
