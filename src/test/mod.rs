
mod test_navigation;
