use crate::errors::AppleValidationError;

/// How the validation service's answer should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClassification {
    Success,
    /// Status 21006. The receipt payload is still present and is decoded
    /// exactly like a success.
    ExpiredButDecodable,
    /// The receipt belongs to the other environment.
    EnvironmentMismatch(MismatchDirection),
    TerminalError(TerminalStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchDirection {
    /// Status 21007.
    SandboxReceiptSentToProduction,
    /// Status 21008.
    ProductionReceiptSentToSandbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStatus {
    Known(AppleValidationError),
    Unknown(i64),
}

impl From<MismatchDirection> for AppleValidationError {
    fn from(direction: MismatchDirection) -> Self {
        match direction {
            MismatchDirection::SandboxReceiptSentToProduction => {
                AppleValidationError::TestReceiptInProductionEnvironment
            }
            MismatchDirection::ProductionReceiptSentToSandbox => {
                AppleValidationError::ProductionReceiptInTestEnvironment
            }
        }
    }
}

/// Classifies a response from the validation service.
///
/// Only the service `status` decides the outcome. The HTTP status is accepted
/// for context; transport-level failures never reach this point.
pub fn classify(_http_status: u16, service_status: i64) -> ResponseClassification {
    if service_status == 0 {
        return ResponseClassification::Success;
    }
    match AppleValidationError::from_code(service_status) {
        Some(AppleValidationError::SubscriptionExpired) => {
            ResponseClassification::ExpiredButDecodable
        }
        Some(AppleValidationError::TestReceiptInProductionEnvironment) => {
            ResponseClassification::EnvironmentMismatch(
                MismatchDirection::SandboxReceiptSentToProduction,
            )
        }
        Some(AppleValidationError::ProductionReceiptInTestEnvironment) => {
            ResponseClassification::EnvironmentMismatch(
                MismatchDirection::ProductionReceiptSentToSandbox,
            )
        }
        Some(known) => ResponseClassification::TerminalError(TerminalStatus::Known(known)),
        None => ResponseClassification::TerminalError(TerminalStatus::Unknown(service_status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_success() {
        assert_eq!(classify(200, 0), ResponseClassification::Success);
    }

    #[test]
    fn expired_subscription_is_decodable() {
        assert_eq!(
            classify(200, 21006),
            ResponseClassification::ExpiredButDecodable
        );
    }

    #[test]
    fn environment_mismatches_carry_direction() {
        assert_eq!(
            classify(200, 21007),
            ResponseClassification::EnvironmentMismatch(
                MismatchDirection::SandboxReceiptSentToProduction
            )
        );
        assert_eq!(
            classify(200, 21008),
            ResponseClassification::EnvironmentMismatch(
                MismatchDirection::ProductionReceiptSentToSandbox
            )
        );
    }

    #[test]
    fn other_known_codes_are_terminal() {
        assert_eq!(
            classify(200, 21004),
            ResponseClassification::TerminalError(TerminalStatus::Known(
                AppleValidationError::IncorrectSharedSecret
            ))
        );
        assert_eq!(
            classify(200, 21000),
            ResponseClassification::TerminalError(TerminalStatus::Known(
                AppleValidationError::BadJson
            ))
        );
    }

    #[test]
    fn unlisted_codes_are_unknown() {
        assert_eq!(
            classify(200, 21100),
            ResponseClassification::TerminalError(TerminalStatus::Unknown(21100))
        );
        assert_eq!(
            classify(200, 21001),
            ResponseClassification::TerminalError(TerminalStatus::Unknown(21001))
        );
    }

    #[test]
    fn http_status_does_not_change_classification() {
        assert_eq!(classify(503, 0), ResponseClassification::Success);
        assert_eq!(classify(200, 21005), classify(500, 21005));
    }
}
