//! Tab ordering and close-time succession contracts
