//! Race and late-delivery contracts
