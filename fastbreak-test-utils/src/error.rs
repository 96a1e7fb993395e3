use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    ProviderError(#[from] fastbreak::provider::ProviderError),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
