pub mod reddit_post;
pub mod tweet;
