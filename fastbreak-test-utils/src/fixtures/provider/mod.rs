use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn provider_fixtures<'a>(&'a mut self) -> ProviderFixtures<'a> {
        ProviderFixtures { setup: self }
    }
}

pub struct ProviderFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
