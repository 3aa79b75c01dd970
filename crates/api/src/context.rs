use arbor_core::UserId;

/// User on whose behalf a request runs, taken from the `x-operator-id` header.
///
/// Absent for anonymous calls (scheduled runs, scripts).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct OperatorContext {
    operator: Option<UserId>,
}

impl OperatorContext {
    pub fn new(operator: Option<UserId>) -> Self {
        Self { operator }
    }

    pub fn operator(&self) -> Option<UserId> {
        self.operator
    }
}
