pub mod assistant;
pub mod youtube;


pub use assistant::AssistantHttp;
pub use youtube::YouTubeDataApi;
