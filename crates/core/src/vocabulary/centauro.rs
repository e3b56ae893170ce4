use cargas_domain::StatusCategory::{
    self, Completed, General, InTransit, Issuance, Pending, PreIssuance, Review, Warehouse,
};

pub(super) static STATUS_CODES: &[(&str, &str, StatusCategory)] = &[
    ("1", "ENTREGA REALIZADA", Completed),
    ("3", "ATRASO NA TRANSFERENCIA", InTransit),
    ("4", "ATRASO NA TRANSPORTADORA", InTransit),
    ("5", "AVARIA TOTAL", Completed),
    ("6", "ENDERECO INCORRETO", Pending),
    ("7", "CLIENTE DESTINO EM GREVE", Pending),
    ("8", "FERIADO LOCAL", Pending),
    ("9", "MERCADORIA EM DESACORDO COM O PEDIDO COMPRA", InTransit),
    ("10", "ARQUIVO RECEBIDO", Issuance),
    ("11", "COLETA REALIZADA", InTransit),
    ("12", "CLIENTE DEVERA RETIRAR PEDIDO EM AGENCIA DOS CORREIOS", Pending),
    ("13", "PEDIDO FORA DA ABRANGENCIA", Pending),
    ("14", "CLIENTE FALECEU", Pending),
    ("16", "DESTINATARIO AUSENTE", Pending),
    ("17", "RECEBIDO NO CD DA TRANSPORTADORA", InTransit),
    ("18", "MERCADORIAS TROCADAS", Pending),
    ("20", "DESTINATARIO DESCONHECIDO", Pending),
    ("23", "EM DEVOLUCAO", InTransit),
    ("24", "MERCADORIA REENTREGUE AO CLIENTE DESTINO", Completed),
    ("25", "EM ROTA DE ENTREGA", InTransit),
    ("27", "EMBALAGEM SINISTRADA", Completed),
    ("28", "ENTREGA EM TRANSITO ENTRE OS CENTROS DE DISTRIBUICAO", InTransit),
    ("30", "ENDERECO INSUFICIENTE", Pending),
    ("33", "FALTA COM BUSCA/RECONFERENCIA", Review),
    ("34", "ENTREGA CANCELADA PELO REMETENTE", InTransit),
    ("48", "ESTABELECIMENTO FECHADO", Pending),
    ("67", "AGENDAMENTO DE ENTREGA", Pending),
    ("69", "NOTA FISCAL REMOVIDA", Issuance),
    ("72", "OUTROS TIPOS DE OCORRENCIA", InTransit),
    ("74", "FUNCIONARIO NAO AUTORIZADO A RECEBER A MERCADORIA", Pending),
    ("75", "MERCADORIA EMBARCADA PARA ROTA INDEVIDA", InTransit),
    ("76", "ESTRADA/ENTRADA DE ACESSO INTERDITADA", InTransit),
    ("80", "EXTRAVIO TOTAL", Completed),
    ("82", "RECUSADO PELO CLIENTE FINAL", Pending),
    ("100", "PEDIDO ENTREGUE PARA A TRANSPORTADORA", Issuance),
    ("103", "SAIDA EFETIVA", InTransit),
    ("105", "COMPROVANTE DE ENTREGA - RECEBIDO", Completed),
    ("109", "MERCADORIA DEVOLVIDA AO CLIENTE DE ORIGEM", Completed),
    ("127", "PERDA DE JANELA DE ENTREGA", Pending),
    ("131", "MERCADORIA REDESPACHADA (ENTREGUE PARA REDESPACHO)", InTransit),
    ("135", "MATERIAL RECUSADO PELO CLIENTE", Pending),
    ("136", "RETIDA NA SEFAZ", Pending),
    ("165", "MANIFESTADO", InTransit),
    ("170", "ENTREGA REALIZADA PARCIAL", Completed),
    ("174", "ENTREGA REALIZADA NO CENTRO DE DISTRIBUICAO", Warehouse),
    ("277", "EMBALAGEM EXTRAVIADA", Pending),
    ("403", "REMESSA REMOVIDA DO MANIFESTO", Issuance),
    ("422", "CONFERENCIA INICIADA", Review),
    ("423", "CONFERENCIA FINALIZADA", Review),
    ("511", "CARRO NO LOCAL DE ENTREGA", InTransit),
    ("667", "FALTA DE VOLUMES", Review),
    ("668", "PEDIDO DUPLICADO", General),
    ("669", "ALTO ESTOQUE/AUSÊNCIA OTB/QUEDA DE AGENDA", Review),
    ("670", "DIVERGÊNCIA ALÍQUOTA IMPOSTO/ SUFRAMA", PreIssuance),
    ("671", "DIVERGÊNCIA DE CADASTRO (ENDEREÇO/CNPJ)", PreIssuance),
    ("672", "VOLUME AVARIADO/VIOLADO", Review),
    ("673", "ANTECIPACAO DE FATURAMENTO", General),
    ("674", "CTE EMITIDO", Issuance),
    ("675", "FORA DE ROTA", InTransit),
    ("676", "CHEGADA NA FILIAL DE DESTINO", InTransit),
    ("677", "REENTREGA AUTORIZADA PELO CLIENTE", Pending),
];
