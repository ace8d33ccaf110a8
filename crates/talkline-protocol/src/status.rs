//! Protocol status codes and the typed outcome built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// StatusCode
// ---------------------------------------------------------------------------

/// The result code every command response carries.
///
/// Exactly one value, [`StatusCode::SUCCESS`], means success. Everything
/// else is a failure, including codes this crate has no name for; those
/// are kept as-is so callers can still branch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(pub i32);

impl StatusCode {
    pub const SUCCESS: Self = Self(0);
    pub const INVALID_USER: Self = Self(-1);
    pub const CLIENT_ERROR: Self = Self(-200);
    pub const NOT_LOGON: Self = Self(-201);
    pub const INVALID_METHOD: Self = Self(-202);
    pub const INVALID_PARAMETER: Self = Self(-203);
    pub const INVALID_HEADER: Self = Self(-204);
    pub const UNAUTHORIZED_CHAT_DELETE: Self = Self(-210);
    pub const MEDIA_SERVER_ERROR: Self = Self(-300);
    pub const CHAT_SPAM_LIMIT: Self = Self(-303);
    pub const RESTRICTED_APP: Self = Self(-304);
    pub const UNSUPPORTED: Self = Self(-308);
    pub const PARTIAL: Self = Self(-310);
    pub const CHAT_SEND_RESTRICTED: Self = Self(-321);
    pub const CHANNEL_CREATE_RESTRICTED: Self = Self(-323);
    pub const INVALID_CHANNEL: Self = Self(-401);
    pub const CHAT_BLOCKED_BY_FRIEND: Self = Self(-402);
    pub const NOT_CHATABLE_USER: Self = Self(-403);
    pub const BLOCKED_IP: Self = Self(-444);
    pub const OPERATION_DENIED: Self = Self(-500);
    pub const CHANNEL_USER_LIMITED: Self = Self(-501);
    pub const TEMP_RESTRICTED: Self = Self(-805);
    pub const WRITE_WHILE_BLOCKED: Self = Self(-814);
    pub const OPENCHAT_REJOIN_REQUIRED: Self = Self(-815);
    pub const INVALID_ACCESSTOKEN: Self = Self(-950);
    pub const BLOCKED_ACCOUNT: Self = Self(-997);
    pub const AUTH_REQUIRED: Self = Self(-998);
    pub const UPDATE_REQUIRED: Self = Self(-999);
    pub const SERVER_UNDER_MAINTENANCE: Self = Self(-9797);

    /// `true` only for [`StatusCode::SUCCESS`].
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// The protocol name of a known code.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::SUCCESS => "SUCCESS",
            Self::INVALID_USER => "INVALID_USER",
            Self::CLIENT_ERROR => "CLIENT_ERROR",
            Self::NOT_LOGON => "NOT_LOGON",
            Self::INVALID_METHOD => "INVALID_METHOD",
            Self::INVALID_PARAMETER => "INVALID_PARAMETER",
            Self::INVALID_HEADER => "INVALID_HEADER",
            Self::UNAUTHORIZED_CHAT_DELETE => "UNAUTHORIZED_CHAT_DELETE",
            Self::MEDIA_SERVER_ERROR => "MEDIA_SERVER_ERROR",
            Self::CHAT_SPAM_LIMIT => "CHAT_SPAM_LIMIT",
            Self::RESTRICTED_APP => "RESTRICTED_APP",
            Self::UNSUPPORTED => "UNSUPPORTED",
            Self::PARTIAL => "PARTIAL",
            Self::CHAT_SEND_RESTRICTED => "CHAT_SEND_RESTRICTED",
            Self::CHANNEL_CREATE_RESTRICTED => "CHANNEL_CREATE_RESTRICTED",
            Self::INVALID_CHANNEL => "INVALID_CHANNEL",
            Self::CHAT_BLOCKED_BY_FRIEND => "CHAT_BLOCKED_BY_FRIEND",
            Self::NOT_CHATABLE_USER => "NOT_CHATABLE_USER",
            Self::BLOCKED_IP => "BLOCKED_IP",
            Self::OPERATION_DENIED => "OPERATION_DENIED",
            Self::CHANNEL_USER_LIMITED => "CHANNEL_USER_LIMITED",
            Self::TEMP_RESTRICTED => "TEMP_RESTRICTED",
            Self::WRITE_WHILE_BLOCKED => "WRITE_WHILE_BLOCKED",
            Self::OPENCHAT_REJOIN_REQUIRED => "OPENCHAT_REJOIN_REQUIRED",
            Self::INVALID_ACCESSTOKEN => "INVALID_ACCESSTOKEN",
            Self::BLOCKED_ACCOUNT => "BLOCKED_ACCOUNT",
            Self::AUTH_REQUIRED => "AUTH_REQUIRED",
            Self::UPDATE_REQUIRED => "UPDATE_REQUIRED",
            Self::SERVER_UNDER_MAINTENANCE => "SERVER_UNDER_MAINTENANCE",
            _ => return None,
        };
        Some(name)
    }
}

/// Prints `0 (SUCCESS)` for known codes and the bare number otherwise.
impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({name})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

// ---------------------------------------------------------------------------
// CommandResult
// ---------------------------------------------------------------------------

/// The typed outcome of a command: `{ success, status, result? }`.
///
/// The fields are private and the only constructors take a status, so
/// `success()` is always exactly `status().is_success()`. A non-success
/// status is an ordinary value here, not an error: callers branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult<T = ()> {
    success: bool,
    status: StatusCode,
    result: Option<T>,
}

impl CommandResult<()> {
    /// An outcome with no result payload.
    pub fn from_status(status: StatusCode) -> Self {
        Self::with_result(status, None)
    }
}

impl<T> CommandResult<T> {
    /// An outcome carrying an operation-specific result.
    pub fn with_result(status: StatusCode, result: Option<T>) -> Self {
        Self {
            success: status.is_success(),
            status,
            result,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<T> {
        self.result
    }
}
