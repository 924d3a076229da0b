mod property_differential;
