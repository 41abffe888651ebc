use crate::domain::payment::Payment;

/// One page of records plus the provider's continuation link, if more pages exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub values: Vec<T>,
    pub next_link: Option<String>,
}

impl<T> Paginated<T> {
    pub fn empty() -> Self {
        Self {
            values: Vec::new(),
            next_link: None,
        }
    }

    pub fn has_more(&self) -> bool {
        self.next_link.is_some()
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Outcome of a payment submission that reached the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentSubmission {
    /// The provider accepted the payment; the record carries the echoed fields.
    Accepted { status: u16, payment: Payment },
    /// The provider answered 2xx but the record itself reports an error.
    Rejected { status: u16, error: String },
    /// The response carried no record to merge.
    NoRecord,
}

impl PaymentSubmission {
    pub fn payment(&self) -> Option<&Payment> {
        match self {
            Self::Accepted { payment, .. } => Some(payment),
            Self::Rejected { .. } | Self::NoRecord => None,
        }
    }
}
