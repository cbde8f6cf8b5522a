pub mod movie;
pub mod search_page;

pub use movie::{CastMember, Credits, CrewMember, Genre, MovieDetail, MovieSummary, TOP_BILLED_CAST};
pub use search_page::SearchResultPage;
