mod http_test;
mod search_test;
