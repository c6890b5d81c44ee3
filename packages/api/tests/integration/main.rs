mod races;
mod scenarios;
