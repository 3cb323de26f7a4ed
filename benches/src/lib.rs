/// Creates keys and messages for every message count in `$message_count_range`.
/// Key `i` has exactly `$message_count_range[i]` message slots.
#[macro_export]
macro_rules! setup_ps {
    ($params: ident, $rng: ident, $message_count_range: ident, $messages_range: ident, $secret_range: ident, $public_range: ident) => {
        // Hardcoding multi-message sizes. This should ideally be taken/updated from command line input
        let $message_count_range = [1, 2, 4, 8, 15, 30, 60, 100];
        let $params = SignatureParams::<Bls12_381>::new::<blake2::Blake2b512>(b"bench");
        let $messages_range = $message_count_range
            .iter()
            .map(|c| {
                (0..*c)
                    .into_iter()
                    .map(|_| Fr::rand(&mut $rng))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let $secret_range = $message_count_range
            .iter()
            .map(|c| SecretKey::<Fr>::rand(&mut $rng, *c))
            .collect::<Vec<_>>();
        let $public_range = $secret_range
            .iter()
            .map(|sk| PublicKey::new(sk, &$params))
            .collect::<Vec<_>>();
    };
}
