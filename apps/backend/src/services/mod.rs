pub mod wordlist;
