mod breed_image;
mod breeds_list;

pub use breed_image::{BreedImageScreen, BreedImageState, ImagePhase};
pub use breeds_list::{breed_rows, BreedRow, BreedsListScreen, BreedsListState, ListPhase, RowKind};
