/// Write access to the host's in-flight response.
///
/// Implement this for a framework's request/response type to let
/// [`crate::Cors::apply`] drive it directly.
pub trait CorsExchange {
    /// Sets a response header, replacing any existing value.
    fn set_header(&mut self, name: &str, value: &str);

    /// Ends the exchange with `status` and an empty body. Downstream handling
    /// must not run afterwards.
    fn halt(&mut self, status: u16);
}

/// What the host should do after [`crate::Cors::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Run the downstream handler.
    Continue,
    /// The response was completed by the CORS layer.
    Halted,
}
