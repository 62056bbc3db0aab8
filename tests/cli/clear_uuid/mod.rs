mod clears_player_files_contract;
mod denies_non_operator_contract;
mod rejects_path_traversal_contract;
