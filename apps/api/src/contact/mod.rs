// Contact form relay: validate → escape → send one email → JSON reply.
// All provider traffic goes through email_client.

pub mod delivery;
pub mod email;
pub mod handlers;
pub mod sanitize;
pub mod validation;

#[cfg(test)]
pub mod test_support;
