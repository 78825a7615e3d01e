pub mod enter_button;
pub mod movie_list;

pub use enter_button::EnterButton;
pub use movie_list::MovieListView;
