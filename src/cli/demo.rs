/// The demo sequence: check the opening balance, move some money, try to
/// overdraw, then print the audit trail.
pub const DEMO_SCRIPT: &str = "op,amount,destination,limit
balance,,,
deposit,100,,
withdraw,50,,
transfer,66,200-333-444,
withdraw,10000,,
balance,,,
history,,,
";
