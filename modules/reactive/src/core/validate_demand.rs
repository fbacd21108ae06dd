use super::StreamError;

/// Validates that a demand request is strictly positive.
///
/// # Errors
///
/// Returns [`StreamError::InvalidDemand`] when `amount == 0`.
pub const fn validate_demand(amount: u64) -> Result<u64, StreamError> {
  if amount == 0 {
    return Err(StreamError::InvalidDemand(amount));
  }
  Ok(amount)
}
