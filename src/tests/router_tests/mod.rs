mod booking_tests;
mod inquiry_tests;
mod landing_tests;
