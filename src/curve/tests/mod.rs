mod curve_tests;
