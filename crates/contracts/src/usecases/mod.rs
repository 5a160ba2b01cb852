pub mod u501_browse_countries;
