pub fn default_version() -> u32 {
    1
}

pub fn default_base_url() -> String {
    // Matches the backend's local development address
    "http://localhost:5000".to_string()
}

pub fn default_timeout_sec() -> u64 {
    120
}
