mod reqwest_fetcher;

pub use reqwest_fetcher::ReqwestFetcher;
