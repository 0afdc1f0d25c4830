pub mod edss;
