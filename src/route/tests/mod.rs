mod itinerary_tests;
