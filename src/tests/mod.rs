mod phonenumberutil_tests;
mod region_code;
