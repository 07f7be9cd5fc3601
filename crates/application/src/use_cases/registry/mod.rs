mod reload;

pub use reload::ReloadRegistriesUseCase;
