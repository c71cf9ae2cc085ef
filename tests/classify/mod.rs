mod classify_each_side_of_changed_paths;
