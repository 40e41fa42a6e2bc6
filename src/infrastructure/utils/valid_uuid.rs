use uuid::Uuid;

use crate::errors::AppError;

/// Validates if a string is a valid UUID format
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::InvalidInput("Invalid UUID format".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_uuid() {
        assert!(valid_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(valid_uuid("not-a-uuid"), Err(AppError::InvalidInput(_))));
    }
}
