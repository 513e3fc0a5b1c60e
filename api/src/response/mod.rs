use serde::Serialize;

/// Standard JSON envelope for error bodies and the health probe.
///
/// ```json
/// {
///   "success": false,
///   "data": {},
///   "message": "No Course found with id: 42"
/// }
/// ```
///
/// Resource endpoints return their documents bare; only the error responder
/// and `/api/health` wrap their payload.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

/// Serializes as `{}`.
#[derive(Serialize, Default, Debug)]
pub struct Empty {}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
