mod reticle_tests;
