use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Length of the public user identifier shown in profile URLs.
pub const PUBLIC_ID_LENGTH: usize = 10;

/// Random base62 identifier.
pub fn generate_public_id(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_id_is_base62_of_requested_length() {
        let id = generate_public_id(PUBLIC_ID_LENGTH);
        assert_eq!(id.len(), PUBLIC_ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
