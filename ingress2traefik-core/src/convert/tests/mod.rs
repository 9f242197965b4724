mod cors_tests;
