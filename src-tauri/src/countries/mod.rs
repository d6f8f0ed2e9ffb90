//! Country explorer: REST Countries search, detail modal with capital weather.

pub mod api;
pub mod detail;
pub mod model;
pub mod widget;

pub use api::CountriesApi;
pub use detail::{CountryDetail, WeatherView};
pub use model::{Country, CurrentWeather};
pub use widget::{CountriesWidget, ModalTarget};
