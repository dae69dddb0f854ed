use cors_gate::CorsExchange;
use indexmap::IndexMap;

/// In-memory host exchange that records what the CORS layer wrote.
#[derive(Debug, Default)]
pub struct RecordingExchange {
    pub headers: IndexMap<String, String>,
    pub status: Option<u16>,
    pub body: Option<Vec<u8>>,
}

impl RecordingExchange {
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }
}

impl CorsExchange for RecordingExchange {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    fn halt(&mut self, status: u16) {
        self.status = Some(status);
        self.body = Some(Vec::new());
    }
}
