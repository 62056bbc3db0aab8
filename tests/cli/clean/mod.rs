mod confirm_removes_stale_players_contract;
mod nothing_found_contract;
mod proposes_without_confirm_contract;
