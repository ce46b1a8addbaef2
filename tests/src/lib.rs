//! End-to-end tests of the ec2inv pipeline against an in-memory cloud.

#[cfg(test)]
mod fakes;

mod inventory {
    mod integration;
}

mod provisioning {
    mod integration;
}
