mod amenities_tests;
mod gallery_tests;
