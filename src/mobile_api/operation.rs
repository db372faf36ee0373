use strum_macros::{Display, IntoStaticStr};

/// A decision on a confirmation.
#[derive(Debug, Display, IntoStaticStr, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// Accept the confirmation.
    Allow,
    /// Decline or cancel the confirmation.
    Cancel,
}

impl Operation {
    /// The value of the `op` parameter.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
    
    /// The tag the confirmation key for this operation is generated with.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Allow => "accept",
            Self::Cancel => "reject",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn maps_to_request_vocabulary() {
        assert_eq!(Operation::Allow.as_str(), "allow");
        assert_eq!(Operation::Cancel.to_string(), "cancel");
        assert_eq!(Operation::Allow.tag(), "accept");
        assert_eq!(Operation::Cancel.tag(), "reject");
    }
}
