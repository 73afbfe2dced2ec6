pub use super::breed::Entity as Breed;
pub use super::character::Entity as Character;
pub use super::comment::Entity as Comment;
pub use super::event::Entity as Event;
pub use super::event_character::Entity as EventCharacter;
pub use super::refresh_token::Entity as RefreshToken;
pub use super::server::Entity as Server;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
