mod app;
mod screens;
mod state;

pub use app::{launch_gui, DogBreedsApp};
pub use screens::{
    breed_rows, BreedImageState, BreedRow, BreedsListState, ImagePhase, ListPhase, RowKind,
};
pub use state::{AppServices, NavIntent, Screen};

#[cfg(target_os = "android")]
pub use app::launch_gui_android;
