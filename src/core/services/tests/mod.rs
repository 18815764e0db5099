mod aggregation_service_tests;
